pub const WIN_MESSAGE: &str = "You win! Great job!";

/// Built-in level, used when no level file is given.
pub const DEFAULT_LEVEL: &[&str] = &[
    "##########",
    "#        #",
    "#  .     #",
    "#   $    #",
    "#        #",
    "#   @    #",
    "#        #",
    "#        #",
    "#        #",
    "##########",
];
