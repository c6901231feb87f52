use bumpalo::Bump;
use mini_syntax::{Expected, NodeKind, OperatorChaining, Parser, ParserError, ParserOptions, Rule, Symbol, TokenKind};

const PROGRAM: &str = "\
// running total
int total = 0;
int i;
i = 1;
while (i <= 10) {
    if (i % 2 == 0) total = total + i;
    else { total = total - 1; }
    i = i + 1;
}
bool done = total >= 20 && i != 0;
#
";

#[test]
fn leaves_reproduce_tokens() {
    let bump = Bump::new();
    let accepted = Parser::new(&bump).parse(PROGRAM).unwrap();

    let leaves = accepted.tree.leaves().map(|node| node.label).collect::<Vec<_>>();
    let tokens = (0..accepted.last)
        .map(|index| accepted.tokens.text(index).unwrap())
        .collect::<Vec<_>>();
    assert_eq!(leaves, tokens);
    assert_eq!(accepted.last, accepted.tokens.len() - 1);

    for (index, node) in accepted.tree.leaves().enumerate() {
        assert_eq!(node.kind, NodeKind::Token(index));
    }
}

#[test]
fn rescanning_is_deterministic() {
    let first_bump = Bump::new();
    let first = Parser::new(&first_bump).tokenize(PROGRAM).unwrap();

    let second_bump = Bump::new();
    let parser = Parser::new(&second_bump);
    parser.tokenize("zeta = 9.5; alpha = 7;").unwrap();
    let second = parser.tokenize(PROGRAM).unwrap();

    assert_eq!(first.tokens(), second.tokens());
    assert_eq!(
        first.constants().iter().collect::<Vec<_>>(),
        second.constants().iter().collect::<Vec<_>>()
    );
    assert_eq!(
        first.identifiers().iter().collect::<Vec<_>>(),
        second.identifiers().iter().collect::<Vec<_>>()
    );
}

#[test]
fn literal_tables_deduplicate() {
    let bump = Bump::new();
    let tokens = Parser::new(&bump).tokenize("x = 1; y = 1;").unwrap();
    assert_eq!(tokens.constants().iter().collect::<Vec<_>>(), vec![(0, "1")]);
    assert_eq!(tokens.identifiers().iter().collect::<Vec<_>>(), vec![(0, "x"), (1, "y")]);
}

#[test]
fn comment_lines_keep_numbering() {
    let bump = Bump::new();
    let tokens = Parser::new(&bump).tokenize("// c\nx = 1;").unwrap();
    assert!(tokens.tokens().iter().all(|token| token.line == 2));
}

#[test]
fn two_character_symbols_are_greedy() {
    let bump = Bump::new();
    let tokens = Parser::new(&bump).tokenize("a >= 1;").unwrap();
    assert_eq!(tokens.text(1), Some(">="));
    assert!(matches!(tokens.get_kind(2), Some(TokenKind::Constant(0))));
}

#[test]
fn rejects_alphabetic_suffix() {
    let bump = Bump::new();
    let error = Parser::new(&bump).parse("1abc").unwrap_err();
    assert!(matches!(error, ParserError::DecimalEndsWithAlphabetic { .. }));
}

#[test]
fn rejects_missing_definition_terminator() {
    let bump = Bump::new();
    let error = Parser::new(&bump).parse("int x y;").unwrap_err();
    let syntax = error.as_syntax().unwrap();
    assert_eq!(syntax.index, 2);
    assert_eq!(syntax.diagnostic.token, "y");
    assert_eq!(syntax.diagnostic.column, 6);
}

#[test]
fn chained_assignment_nests_twice() {
    let bump = Bump::new();
    let accepted = Parser::new(&bump).parse("a = b = 3;").unwrap();
    let tree = &accepted.tree;

    let utils = tree.find(Rule::AssignmentUtil).collect::<Vec<_>>();
    assert_eq!(utils.len(), 2);
    assert_eq!(tree.parent(utils[1]), Some(utils[0]));
    assert_eq!(tree.depth(utils[1]), tree.depth(utils[0]) + 1);
}

#[test]
fn leftover_tokens_are_reported() {
    let bump = Bump::new();
    let error = Parser::new(&bump).parse("x = 1;\n} y = 2;").unwrap_err();
    let syntax = error.as_syntax().unwrap();
    assert_eq!(syntax.diagnostic.line, 2);
    assert_eq!(syntax.diagnostic.token, "}");
    assert_eq!(syntax.diagnostic.marker(), "   ^");
}

#[test]
fn chaining_is_opt_in() {
    let bump = Bump::new();
    let text = "x = a - b - c;";
    assert!(Parser::new(&bump).parse(text).is_err());

    let options = ParserOptions::default().with_operators(OperatorChaining::LeftAssociative);
    assert!(Parser::with_options(&bump, options).parse(text).is_ok());
}

#[test]
fn render_shows_every_node() {
    let bump = Bump::new();
    let accepted = Parser::new(&bump).parse("int x;").unwrap();
    let rendered = accepted.tree.render();
    assert_eq!(rendered.lines().count(), accepted.tree.len());
    assert_eq!(
        rendered,
        "\
start
└── Source
    └── Statement
        └── Definition
            ├── int
            ├── Identifier
            │   └── x
            └── Symbol
                └── ;
"
    );
}

#[test]
fn deeply_nested_parentheses() {
    let bump = Bump::new();
    let depth = 10_000;
    let text = format!("x = {}1{};", "(".repeat(depth), ")".repeat(depth));
    let accepted = Parser::new(&bump).parse(&text).unwrap();
    assert_eq!(accepted.tree.find(Rule::Primary).count(), depth + 1);

    let unbalanced = format!("x = {}1{};", "(".repeat(depth), ")".repeat(depth - 1));
    let error = Parser::new(&bump).parse(&unbalanced).unwrap_err();
    let syntax = error.as_syntax().unwrap();
    assert_eq!(syntax.expected, Some(Expected::Symbol(Symbol::RightParen)));
    assert_eq!(syntax.diagnostic.token, ";");
}

#[test]
fn deeply_nested_blocks() {
    let bump = Bump::new();
    let depth = 10_000;
    let text = format!("{}x = 1;{}", "while (a) {".repeat(depth), "}".repeat(depth));
    let accepted = Parser::new(&bump).parse(&text).unwrap();
    assert_eq!(accepted.tree.find(Rule::While).count(), depth);
    assert_eq!(accepted.last, accepted.tokens.len() - 1);
}

#[test]
fn render_deep_tree() {
    let bump = Bump::new();
    let depth = 300;
    let text = format!("{}x = 1;{}", "while (a) {".repeat(depth), "}".repeat(depth));
    let accepted = Parser::new(&bump).parse(&text).unwrap();
    let rendered = accepted.tree.render();
    assert_eq!(rendered.lines().count(), accepted.tree.len());
    assert!(rendered.lines().last().is_some_and(|line| line.ends_with("└── }")));
}

#[test]
fn missing_assignment_reports_actual_token() {
    let bump = Bump::new();
    let error = Parser::new(&bump).parse("int a;\ny;\n").unwrap_err();
    let syntax = error.as_syntax().unwrap();
    assert_eq!(syntax.index, 4);
    assert_eq!(syntax.expected, Some(Expected::Symbol(Symbol::Assign)));
    assert_eq!(syntax.diagnostic.to_string(), "2: y;\n    ^\nerror: illegal token ';' found in line 2 of the source file");
}
