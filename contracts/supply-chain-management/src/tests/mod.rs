mod utils;

mod manufacturer;
