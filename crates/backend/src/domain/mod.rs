pub mod a001_scenario;
