use crate::error::AppResult;

pub fn print_line(line: &str) -> AppResult<()> {
    println!("{line}");
    Ok(())
}

pub fn print_lines(lines: &[String]) -> AppResult<()> {
    for line in lines {
        println!("{line}");
    }
    Ok(())
}
