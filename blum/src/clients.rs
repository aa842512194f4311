pub mod toncenter;
