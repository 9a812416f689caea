pub mod paddle_id;
