mod academics;
mod common;
mod extraction;
mod grading;
