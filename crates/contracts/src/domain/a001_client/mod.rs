pub mod aggregate;

pub use aggregate::{Client, ClientDto, ClientId, ClientRef, Prescription};
