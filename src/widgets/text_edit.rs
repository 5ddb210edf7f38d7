//! Char-indexed editing helpers shared by text-entry widgets. Cursors are
//! char offsets, not byte offsets.

pub fn char_count(value: &str) -> usize {
    value.chars().count()
}

pub fn clamp_cursor(cursor: usize, value: &str) -> usize {
    cursor.min(char_count(value))
}

pub fn insert_char(value: &mut String, cursor: &mut usize, ch: char) {
    let pos = clamp_cursor(*cursor, value);
    let byte_pos = byte_index_at_char(value, pos);
    value.insert(byte_pos, ch);
    *cursor = pos + 1;
}

pub fn backspace_char(value: &mut String, cursor: &mut usize) -> bool {
    let pos = clamp_cursor(*cursor, value);
    if pos == 0 {
        return false;
    }
    let byte_pos = byte_index_at_char(value, pos - 1);
    value.remove(byte_pos);
    *cursor = pos - 1;
    true
}

pub fn delete_char(value: &mut String, cursor: &mut usize) -> bool {
    let pos = clamp_cursor(*cursor, value);
    if pos >= char_count(value) {
        return false;
    }
    let byte_pos = byte_index_at_char(value, pos);
    value.remove(byte_pos);
    *cursor = pos;
    true
}

pub fn move_left(cursor: &mut usize, value: &str) -> bool {
    let pos = clamp_cursor(*cursor, value);
    if pos == 0 {
        return false;
    }
    *cursor = pos - 1;
    true
}

pub fn move_right(cursor: &mut usize, value: &str) -> bool {
    let pos = clamp_cursor(*cursor, value);
    if pos >= char_count(value) {
        return false;
    }
    *cursor = pos + 1;
    true
}

fn byte_index_at_char(value: &str, char_idx: usize) -> usize {
    if char_idx == 0 {
        return 0;
    }
    value
        .char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(value.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_at_cursor_advances_cursor() {
        let mut value = String::from("ac");
        let mut cursor = 1;
        insert_char(&mut value, &mut cursor, 'b');
        assert_eq!(value, "abc");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut value = String::from("abc");
        let mut cursor = 0;
        assert!(!backspace_char(&mut value, &mut cursor));
        assert_eq!(value, "abc");
    }

    #[test]
    fn delete_removes_char_under_cursor() {
        let mut value = String::from("abc");
        let mut cursor = 1;
        assert!(delete_char(&mut value, &mut cursor));
        assert_eq!(value, "ac");
        assert_eq!(cursor, 1);
        cursor = 2;
        assert!(!delete_char(&mut value, &mut cursor));
    }

    #[test]
    fn multibyte_chars_edit_by_char_index() {
        let mut value = String::from("héllo");
        let mut cursor = 2;
        assert!(backspace_char(&mut value, &mut cursor));
        assert_eq!(value, "hllo");
        assert_eq!(cursor, 1);
        insert_char(&mut value, &mut cursor, 'é');
        assert_eq!(value, "héllo");
    }

    #[test]
    fn movement_clamps_at_both_ends() {
        let value = "ab";
        let mut cursor = 0;
        assert!(!move_left(&mut cursor, value));
        assert!(move_right(&mut cursor, value));
        assert!(move_right(&mut cursor, value));
        assert!(!move_right(&mut cursor, value));
        assert_eq!(cursor, 2);
    }
}
