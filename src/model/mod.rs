pub mod department;
pub mod employee;
pub mod gender;
pub mod salary;
