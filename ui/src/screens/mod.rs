// This file makes the screen modules available to the rest of the application.

pub mod show_object;
