//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool family is defined in its own file.

pub mod forecast;
pub mod greeting;

pub use forecast::{TourForecastParams, TourForecastTool};
pub use greeting::{
    SayHelloMultipleParams, SayHelloMultipleTool, SayHelloParams, SayHelloTool, say_hello,
    say_hello_multiple,
};
