
mod events_test;
