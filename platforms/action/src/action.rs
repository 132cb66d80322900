use keymap::KeyMap;

#[derive(KeyMap, Clone, Copy, Debug, PartialEq)]
pub enum Action {
    /// Validate the entered string and run the automaton
    #[key("enter")]
    Start,
    /// Show the previous configuration of the trace
    #[key("left")]
    Previous,
    /// Show the next configuration of the trace
    #[key("right")]
    Next,
    /// Quit the application
    #[key("esc")]
    End,
    /// Toggle help display
    #[key("f1")]
    ToggleHelp,
    /// Replace the entry with the next built-in sample
    #[key("tab")]
    NextSample,
}
