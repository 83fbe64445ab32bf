pub mod pog;
