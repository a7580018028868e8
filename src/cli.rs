// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help.

pub fn print_help() {
    println!(
        "Quadcal v{} - Generates a recurring-events .ics calendar from a UFABC enrollment summary",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    quadcal [OPTIONS] <resumo.txt>        Generate the calendar (writes .ics to stdout)");
    println!("    quadcal init-config <file.toml>       Write a default configuration file");
    println!("    quadcal --help                        Show this help message");
    println!();
    println!("OPTIONS:");
    println!("    -t, --table <pages.json>   Extracted rooms/instructors table (pages of rows of cells).");
    println!("                               Falls back to table_path from the config file.");
    println!("    -c, --config <file.toml>   Configuration file (term dates, timezone, table path).");
    println!("                               Without it, the built-in quadrimester defaults apply.");
    println!("    -o, --output <file.ics>    Write the calendar to a file instead of stdout.");
    println!("    -h, --help                 Show this help message.");
    println!();
    println!("EXAMPLES:");
    println!("    quadcal --table turmas_2026_1.json resumo.txt > minhas_aulas.ics");
    println!("    quadcal -c quadcal.toml -t turmas.json -o agenda.ics resumo.txt");
    println!("    quadcal init-config quadcal.toml      Then edit term_start/term_end annually");
    println!();
    println!("INPUT:");
    println!("    <resumo.txt> is the pasted 'Resumo de Matrícula' text. The table JSON is the");
    println!("    output of an external PDF table extractor: [[[cell, ...], ...], ...] with");
    println!("    one array per page, one per row, nullable string cells.");
    println!();
    println!("    Rooms and professors are cross-referenced best-effort: disciplines without a");
    println!("    table match get 'Não encontrado' / 'Verificar PDF' placeholders.");
}
