pub mod shared_boggle_game;
