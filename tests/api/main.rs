mod helpers;
mod verify;
