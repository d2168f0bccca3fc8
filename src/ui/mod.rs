pub mod keyboards;
