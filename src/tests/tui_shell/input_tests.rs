use super::*;

#[test]
fn editing_respects_multibyte_characters() {
    let mut input = Input::default();
    for c in "cd ä".chars() {
        input.insert_char(c);
    }
    input.move_left();
    input.insert_char('ö');
    assert_eq!(input.buf, "cd öä");
    assert_eq!(input.cursor, 4);

    input.backspace();
    input.delete();
    assert_eq!(input.buf, "cd ");
    input.move_home();
    input.delete();
    assert_eq!(input.buf, "d ");
    input.move_end();
    assert_eq!(input.cursor, 2);
}

#[test]
fn history_walks_back_and_forth() {
    let mut input = Input::default();
    input.push_history("ls");
    input.push_history("ls");
    input.push_history("cd content");
    input.push_history("   ");
    assert_eq!(input.history, vec!["ls", "cd content"]);

    input.history_up();
    assert_eq!(input.buf, "cd content");
    input.history_up();
    assert_eq!(input.buf, "ls");
    input.history_up();
    assert_eq!(input.buf, "ls");
    input.history_down();
    assert_eq!(input.buf, "cd content");
    input.history_down();
    assert_eq!(input.buf, "");
    assert_eq!(input.history_pos, None);
}
