pub mod employee;

pub use employee::EmployeeRecord;
