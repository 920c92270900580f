pub mod cwa;
