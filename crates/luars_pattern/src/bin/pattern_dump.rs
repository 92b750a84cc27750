use luars_pattern::{MatchInfo, Pattern};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    let Some(source) = args.get(1) else {
        println!("Usage: pattern_dump <pattern> [subject]");
        std::process::exit(0);
    };

    let pattern = match Pattern::new(source) {
        Ok(pattern) => pattern,
        Err(e) => {
            eprintln!("Compilation error: {}", e);
            std::process::exit(1);
        }
    };

    let program = pattern.program();
    println!("=== {} ===", pattern.as_str());
    println!(
        "captures: {}, anchored: {}{}, instructions: {}",
        program.captures(),
        if program.head_anchored() { "^" } else { "" },
        if program.tail_anchored() { "$" } else { "" },
        program.instructions().len()
    );
    println!();
    print!("{}", program.disassemble());

    if let Some(subject) = args.get(2) {
        println!();
        let matches = match pattern.try_find_index_all(subject, None) {
            Ok(matches) => matches,
            Err(e) => {
                eprintln!("Match error: {}", e);
                std::process::exit(1);
            }
        };
        println!("=== {} match(es) in {:?} ===", matches.len(), subject);
        for (i, m) in matches.iter().enumerate() {
            dump_match(i, m, subject);
        }
    }
}

fn dump_match(index: usize, m: &MatchInfo, subject: &str) {
    println!("[{}] {}..{} {:?}", index, m.start(), m.end(), m.as_str(subject));
    for (group, capture) in m.captures.iter().enumerate() {
        match capture {
            Some(span) => println!(
                "    %{} {}..{} {:?}",
                group + 1,
                span.start,
                span.end,
                span.slice(subject)
            ),
            None => println!("    %{} -", group + 1),
        }
    }
}
