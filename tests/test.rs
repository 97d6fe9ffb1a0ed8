use elementary::{Automaton, Config, Error, RuleTable};

fn run(size: usize, rule: i128, steps: usize) -> Automaton {
    let mut automaton = Automaton::new(size, rule).unwrap();
    for _ in 0..steps {
        automaton.step();
    }
    automaton
}

fn rows(size: usize, rule: i128, generations: usize) -> Vec<String> {
    let mut session = Config::new(size, rule)
        .set_generations(generations)
        .session()
        .unwrap();
    let rows = session
        .run()
        .map(|row| {
            row.into_iter()
                .map(|cell| if cell == 1 { 'o' } else { '.' })
                .collect::<String>()
        })
        .collect();
    rows
}

#[test]
fn rule_30_center_column() {
    let mut automaton = Automaton::new(101, 30).unwrap();
    let mut column = Vec::new();
    for _ in 0..20 {
        column.push(automaton.cells()[50]);
        automaton.step();
    }
    assert_eq!(
        column,
        vec![1, 1, 0, 1, 1, 1, 0, 0, 1, 1, 0, 0, 0, 1, 0, 1, 1, 0, 0, 1]
    );
}

#[test]
fn rule_90_sierpinski() {
    assert_eq!(
        rows(15, 90, 8),
        vec![
            ".......o.......",
            "......o.o......",
            ".....o...o.....",
            "....o.o.o.o....",
            "...o.......o...",
            "..o.o.....o.o..",
            ".o...o...o...o.",
            "o.o.o.o.o.o.o.o",
        ]
    );
}

#[test]
fn rule_184_conserves_cars() {
    let mut automaton = Automaton::from_cells(vec![1, 1, 0, 1, 0, 0, 1, 0], 184).unwrap();
    automaton.step();
    assert_eq!(automaton.cells(), &[1, 0, 1, 0, 1, 0, 0, 1]);
    for _ in 0..20 {
        automaton.step();
        assert_eq!(automaton.population(), 4);
    }
}

#[test]
fn display_matches_rows() {
    let automaton = run(15, 90, 3);
    assert_eq!(automaton.to_string(), "....o.o.o.o....");
    assert_eq!(automaton.generation(), 3);
}

#[test]
fn wide_rules() {
    assert_eq!(
        run(11, 300, 3).cells(),
        &[0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0]
    );
    assert_eq!(
        run(11, 70000, 3).cells(),
        &[1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1]
    );
    assert_eq!(run(11, (1 << 40) + 12345, 3).cells(), &[1; 11]);
}

#[test]
fn rule_0_and_255() {
    assert_eq!(run(6, 0, 1).cells(), &[0; 6]);
    assert_eq!(run(6, 255, 1).cells(), &[1; 6]);
}

#[test]
fn distinct_automata_are_independent() {
    let mut a = Automaton::new(9, 30).unwrap();
    let b = a.clone();
    a.step();
    assert_ne!(a.cells(), b.cells());
    assert_eq!(b.cells(), Automaton::new(9, 30).unwrap().cells());
}

#[test]
fn errors() {
    assert_eq!(Automaton::new(0, 30).unwrap_err(), Error::InvalidSize);
    assert_eq!(
        Automaton::new(5, -1).unwrap_err(),
        Error::InvalidRule("-1".to_string())
    );
    assert_eq!(
        "W18446744073709551616".parse::<RuleTable>().unwrap_err(),
        Error::UnsupportedRule("18446744073709551616".to_string())
    );
    assert_eq!(
        Error::InvalidSize.to_string(),
        "Size should be positive."
    );
}
