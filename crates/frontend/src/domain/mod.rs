pub mod a001_grimorio;
