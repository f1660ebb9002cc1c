pub mod functional;
