pub mod blogs;
