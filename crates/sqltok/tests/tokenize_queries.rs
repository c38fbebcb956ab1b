//! End-to-end tokenisation of whole queries.

mod common;
use common::*;

use sqltok::TokenKind::*;

#[test]
fn simple_query() {
    assert_tokens(
        "SELECT * FROM `test`;",
        &[
            tok(Select, "SELECT"),
            tok(Unknown, "*"),
            tok(From, "FROM"),
            tok(EscapedValue, "`test`"),
        ],
    );
}

#[test]
fn simple_where_clause() {
    let expected = [
        tok(Select, "SELECT"),
        tok(Unknown, "*"),
        tok(From, "FROM"),
        tok(EscapedValue, "`test`"),
        tok(Where, "WHERE"),
        tok(Unknown, "column"),
        tok(Equals, "="),
        tok(Numeric, "1"),
    ];
    assert_tokens("SELECT * FROM `test` WHERE column = 1;", &expected);
    assert_tokens("SELECT * FROM `test` WHERE column=1;", &expected);
}

#[test]
fn complex_joins_and_where_clause() {
    let sql = "SELECT * FROM `myTable` AS a
        INNER JOIN `myOtherTable` ON `a`.`id` = `myOtherTable`.`my_table_id`
        LEFT JOIN `leftTable` ON `myOtherTable`.id = `leftTable`.`my_other_table_id`
        WHERE `myValue` >= 5 AND a.myOtherValue IS NOT NULL AND `leftTable`.anotherOne IN (10, 15, 20) LIMIT 5;";

    assert_tokens(
        sql,
        &[
            tok(Select, "SELECT"),
            tok(Unknown, "*"),
            tok(From, "FROM"),
            tok(EscapedValue, "`myTable`"),
            tok(As, "AS"),
            tok(Unknown, "a"),
            tok(InnerJoin, "INNER JOIN"),
            tok(EscapedValue, "`myOtherTable`"),
            tok(JoinOn, "ON"),
            tok(EscapedValue, "`a`"),
            tok(Unknown, "."),
            tok(EscapedValue, "`id`"),
            tok(Equals, "="),
            tok(EscapedValue, "`myOtherTable`"),
            tok(Unknown, "."),
            tok(EscapedValue, "`my_table_id`"),
            tok(LeftJoin, "LEFT JOIN"),
            tok(EscapedValue, "`leftTable`"),
            tok(JoinOn, "ON"),
            tok(EscapedValue, "`myOtherTable`"),
            tok(Unknown, "."),
            tok(Unknown, "id"),
            tok(Equals, "="),
            tok(EscapedValue, "`leftTable`"),
            tok(Unknown, "."),
            tok(EscapedValue, "`my_other_table_id`"),
            tok(Where, "WHERE"),
            tok(EscapedValue, "`myValue`"),
            tok(GreaterThanOrEqual, ">="),
            tok(Numeric, "5"),
            tok(And, "AND"),
            tok(Unknown, "a"),
            tok(Unknown, "."),
            tok(Unknown, "myOtherValue"),
            tok(IsNotNull, "IS NOT NULL"),
            tok(And, "AND"),
            tok(EscapedValue, "`leftTable`"),
            tok(Unknown, "."),
            tok(Unknown, "anotherOne"),
            tok(Unknown, "IN"),
            tok(Expression, "(10, 15, 20)"),
            tok(Limit, "LIMIT"),
            tok(Numeric, "5"),
        ],
    );
}

#[test]
fn left_join_is_one_token() {
    let tokens = tokens("SELECT a FROM t LEFT JOIN `leftTable` ON x = y");
    let joins: Vec<_> = tokens.iter().filter(|t| t.raw.contains("JOIN")).collect();
    assert_eq!(joins.len(), 1);
    assert_eq!(joins[0].kind, LeftJoin);
    assert_eq!(joins[0].raw, "LEFT JOIN");
    assert!(!tokens.iter().any(|t| t.kind == Not || t.raw == "LEFT"));
}

#[test]
fn right_and_bare_join() {
    assert_tokens(
        "a RIGHT JOIN b JOIN c",
        &[
            tok(Unknown, "a"),
            tok(RightJoin, "RIGHT JOIN"),
            tok(Unknown, "b"),
            tok(InnerJoin, "JOIN"),
            tok(Unknown, "c"),
        ],
    );
}

#[test]
fn grouping_ordering_and_aggregates() {
    assert_tokens(
        "SELECT COUNT(id), SUM(total) FROM orders GROUP BY customer ORDER BY 2 LIMIT 10",
        &[
            tok(Select, "SELECT"),
            tok(Count, "COUNT"),
            tok(Expression, "(id)"),
            tok(Unknown, ","),
            tok(Sum, "SUM"),
            tok(Expression, "(total)"),
            tok(From, "FROM"),
            tok(Unknown, "orders"),
            tok(GroupBy, "GROUP BY"),
            tok(Unknown, "customer"),
            tok(OrderBy, "ORDER BY"),
            tok(Numeric, "2"),
            tok(Limit, "LIMIT"),
            tok(Numeric, "10"),
        ],
    );
}

#[test]
fn conditionals() {
    assert_tokens(
        "WHERE name LIKE 'a%' OR NOT age BETWEEN 18 AND 30.5 AND x IS NULL",
        &[
            tok(Where, "WHERE"),
            tok(Unknown, "name"),
            tok(Like, "LIKE"),
            tok(StringValue, "'a%'"),
            tok(Or, "OR"),
            tok(Not, "NOT"),
            tok(Unknown, "age"),
            tok(Between, "BETWEEN"),
            tok(Numeric, "18"),
            tok(And, "AND"),
            tok(Numeric, "30.5"),
            tok(And, "AND"),
            tok(Unknown, "x"),
            tok(IsNull, "IS NULL"),
        ],
    );
}

#[test]
fn comparison_operators() {
    assert_tokens(
        "a=1 b<>2 c>3 d>=4 e<5 f<=6",
        &[
            tok(Unknown, "a"),
            tok(Equals, "="),
            tok(Numeric, "1"),
            tok(Unknown, "b"),
            tok(NotEquals, "<>"),
            tok(Numeric, "2"),
            tok(Unknown, "c"),
            tok(GreaterThan, ">"),
            tok(Numeric, "3"),
            tok(Unknown, "d"),
            tok(GreaterThanOrEqual, ">="),
            tok(Numeric, "4"),
            tok(Unknown, "e"),
            tok(LessThan, "<"),
            tok(Numeric, "5"),
            tok(Unknown, "f"),
            tok(LessThanOrEqual, "<="),
            tok(Numeric, "6"),
        ],
    );
}

#[test]
fn value_containers() {
    assert_tokens(
        r#"INSERT 'it''s' "double" [bracketed name] {param} `ident`"#,
        &[
            tok(Unknown, "INSERT"),
            tok(StringValue, "'it'"),
            tok(StringValue, "'s'"),
            tok(StringValue, "\"double\""),
            tok(EscapedValue, "[bracketed name]"),
            tok(PlaceholderValue, "{param}"),
            tok(EscapedValue, "`ident`"),
        ],
    );
}

#[test]
fn escaped_quote_inside_string() {
    assert_tokens(
        r"WHERE name = 'O\'Brien'",
        &[
            tok(Where, "WHERE"),
            tok(Unknown, "name"),
            tok(Equals, "="),
            tok(StringValue, r"'O\'Brien'"),
        ],
    );
}

#[test]
fn container_kind_ignores_neighbours() {
    for sql in ["`x`", "SELECT `x`", "`x` FROM", "a.`x`.b", "=`x`="] {
        let tokens = tokens(sql);
        let escaped: Vec<_> = tokens.iter().filter(|t| t.raw == "`x`").collect();
        assert_eq!(escaped.len(), 1, "{sql}");
        assert_eq!(escaped[0].kind, EscapedValue, "{sql}");
    }
}

#[test]
fn lone_period_is_unknown() {
    assert_tokens(".", &[tok(Unknown, ".")]);
    assert_tokens("a . b", &[tok(Unknown, "a"), tok(Unknown, "."), tok(Unknown, "b")]);
}

#[test]
fn spans_point_into_original_query() {
    let sql = "  SELECT name FROM `users`  ;";
    for token in tokens(sql) {
        assert_eq!(token.span.slice(sql), Some(token.raw.as_str()));
    }
}
