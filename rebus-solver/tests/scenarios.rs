//! End-to-end scenarios through the public API

use rebus_solver::{
    ColumnSearch, CompileError, Modulus, NaiveSearch, ParallelSearch, Rebus, Search, Strategy,
    Substitution, compile, solve,
};

fn pairs(sub: &Substitution) -> Vec<(char, u8)> {
    sub.iter().collect()
}

#[test]
fn test_goat_times_two_compiles_to_rpn() {
    let rpn = compile("КОЗА*2 = СТАДО").unwrap();
    assert_eq!(rpn.to_strings(), ["КОЗА", "2", "*", "СТАДО", "-"]);
}

#[test]
fn test_goat_plus_goat_every_strategy() {
    let rebus = Rebus::new("КОЗА+КОЗА = СТАДО").unwrap();

    for strategy in Strategy::ALL {
        let result = rebus.solve(strategy);
        let mut decoded: Vec<String> = result
            .report
            .solutions
            .iter()
            .map(|s| rebus.decode(s))
            .collect();
        decoded.sort();
        assert_eq!(
            decoded,
            ["7693+7693 = 15386", "8653+8653 = 17306"],
            "{strategy}"
        );

        let substitutions: Vec<Vec<(char, u8)>> =
            result.report.solutions.iter().map(pairs).collect();
        assert_eq!(
            substitutions,
            vec![
                vec![('А', 3), ('Д', 0), ('З', 5), ('К', 8), ('О', 6), ('С', 1), ('Т', 7)],
                vec![('А', 3), ('Д', 8), ('З', 9), ('К', 7), ('О', 6), ('С', 1), ('Т', 5)],
            ],
            "{strategy}"
        );
    }
}

#[test]
fn test_equation_without_letters() {
    for strategy in Strategy::ALL {
        let report = solve(&compile("2+2=4").unwrap(), strategy);
        assert_eq!(report.solutions.len(), 1, "{strategy}");
        assert!(report.solutions.iter().all(Substitution::is_empty));

        let report = solve(&compile("2+2=5").unwrap(), strategy);
        assert!(report.solutions.is_empty(), "{strategy}");
    }
}

#[test]
fn test_unknown_symbol_fails_before_search() {
    assert!(matches!(
        compile("КОЗА/2 = СТАДО"),
        Err(CompileError::UnknownSymbol(s)) if s == "/"
    ));
    assert!(matches!(
        Rebus::new("A/B = C"),
        Err(CompileError::UnknownSymbol(_))
    ));
}

#[test]
fn test_ten_letters_terminates_with_valid_solutions() {
    let rpn = compile("трава+корова+доярка = молоко").unwrap();
    assert_eq!(rpn.letters().len(), 10);

    let report = ColumnSearch.search(&rpn);
    assert_eq!(report.solutions.len(), 2);
    for solution in &report.solutions {
        assert!(solution.is_complete(&rpn.letters()));
        assert!(!rpn.has_leading_zero(solution));
        assert_eq!(rpn.apply(solution).evaluate(Modulus::Exact), Ok(0));
    }
    assert_eq!(report.solutions, ParallelSearch::new().search(&rpn).solutions);
}

#[test]
fn test_words_longer_than_i128() {
    let word = "A".repeat(40);
    let rpn = compile(&format!("{word} = {word}")).unwrap();
    for strategy in Strategy::ALL {
        let digits: Vec<u8> = solve(&rpn, strategy)
            .solutions
            .iter()
            .filter_map(|s| s.digit('A'))
            .collect();
        assert_eq!(digits, [1, 2, 3, 4, 5, 6, 7, 8, 9], "{strategy}");
    }

    let word = "AB".repeat(20);
    let rpn = compile(&format!("{word} - {word} = 0")).unwrap();
    assert_eq!(ColumnSearch.search(&rpn).solutions.len(), 81);
    assert_eq!(NaiveSearch.search(&rpn).solutions.len(), 81);
}

#[test]
fn test_send_more_money_parallel_and_column_agree() {
    let rebus = Rebus::new("SEND + MORE = MONEY").unwrap();
    let column = rebus.solve_with(&ColumnSearch);
    let parallel = rebus.solve_with(&ParallelSearch::new());
    assert_eq!(column.report.solutions, parallel.report.solutions);
    assert_eq!(rebus.solutions(Strategy::ColumnWise), ["9567 + 1085 = 10652"]);
}

#[test]
fn test_multiplication_rebus() {
    // AB * C = DE with a carry into the tens column
    let rpn = compile("AB*C = DE").unwrap();
    let expected = NaiveSearch.search(&rpn).solutions;
    assert!(!expected.is_empty());
    assert_eq!(ColumnSearch.search(&rpn).solutions, expected);
    for solution in &expected {
        let decoded = solution.decode("AB*C=DE");
        let (lhs, rhs) = decoded.split_once('=').unwrap();
        let (ab, c) = lhs.split_once('*').unwrap();
        let product = ab.parse::<u32>().unwrap() * c.parse::<u32>().unwrap();
        assert_eq!(product, rhs.parse::<u32>().unwrap());
    }
}

#[test]
fn test_parenthesized_both_sides() {
    let rpn = compile("(A+B)*C = C*(B+A)").unwrap();
    // true for every assignment without a leading zero problem
    assert_eq!(ColumnSearch.search(&rpn).solutions.len(), 10 * 9 * 8);
}
