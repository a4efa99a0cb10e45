//! ByteBuffer tests.

mod buffer_tests;
