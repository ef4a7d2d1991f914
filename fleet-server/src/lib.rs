//! EV fleet dashboard server.
//!
//! A web application for running a small electric vehicle fleet. Its
//! core answers: "I'm driving from here to there with this much charge,
//! which charging stations should I aim for?"

pub mod advisor;
pub mod chargemap;
pub mod config;
pub mod energy;
pub mod fleet;
pub mod geo;
pub mod geocoder;
pub mod health;
pub mod report;
pub mod web;
