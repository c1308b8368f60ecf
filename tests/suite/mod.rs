mod config;
mod properties;
mod scenarios;
mod semideciders;
