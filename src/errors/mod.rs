pub mod startup_error;
