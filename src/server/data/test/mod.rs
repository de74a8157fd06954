mod guess;
mod maze;
