pub mod city;
pub mod destination;
pub mod hotel;
pub mod reservation;
pub mod room;
