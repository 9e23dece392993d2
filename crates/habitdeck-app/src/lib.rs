// Application layer - command handlers, queries, DTOs and seeding over the
// domain interfaces. Consumed by an external presentation layer; no
// interactive or rendering concerns live here.

pub mod application;
