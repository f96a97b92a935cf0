use std::fmt::Write;

/// представить группы таблицы двоичными литералами, по `per_line` групп в строке.
/// старший бит литерала - слева, т.е. наименьший кодпоинт группы - крайняя правая цифра
pub fn format_groups(groups: &[u8], per_line: usize) -> String
{
    // "0b00000000, " - 12 символов
    let mut output = String::with_capacity(groups.len() * 12 + groups.len() / per_line);

    for (i, group) in groups.iter().enumerate() {
        let _ = write!(output, "{:#010b}, ", group);

        if (i + 1) % per_line == 0 {
            output.push('\n');
        }
    }

    output
}
