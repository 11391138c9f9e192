// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_list_note(sections: usize) -> String {
    let mut content = String::from("*Benchmark*\n");

    for section in 0..sections {
        content.push_str(&format!("section {section}\n"));
        content.push_str("    plain item with <html> & \"quotes\"\n");
        content.push_str("    item with **strong** text and \\*escaped\\* stars\n");
        content.push_str("        nested one\n");
        content.push_str("        nested **two**\n");
        content.push_str("    *code line one\n");
        content.push_str("\tindented code\n");
        content.push_str("last code line*\n");
        content.push_str("    #diagram.png#\n\n");
    }

    content
}

#[allow(dead_code)]
pub fn generate_narrative_note(sections: usize) -> String {
    let mut content = String::from("*Benchmark*narrative\n");

    for section in 0..sections {
        content.push_str(&format!("chapter {section}\n"));
        for _ in 0..5 {
            content.push_str("    A paragraph with some **emphasis** and ordinary prose that runs for a while.\n");
        }
        content.push_str("    *fn example() {\n        println!(\"hi\");\n}*\n");
    }

    content
}
