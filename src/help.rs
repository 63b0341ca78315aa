pub const PROMPT: &str = "input: ";

pub const HELP: &str = r#"T9 Text Input Emulator

Type keypad digits 2-9 and press enter. Several digits can be entered at once.

  <digits>       walk one key per digit, e.g. 227
  < | back       delete the last digit
  n | next       select the next candidate word
  p | prev       select the previous candidate word
  r | reset      clear the input
  ? | help       show this help
  q | quit | esc leave
"#;
