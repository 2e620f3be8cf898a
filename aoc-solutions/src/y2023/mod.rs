mod day01;
mod day02;
mod day04;
mod day06;
mod day09;
mod day15;
