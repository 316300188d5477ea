#[cfg(test)]
pub mod fixtures {
    use chrono::{NaiveDate, NaiveTime, TimeDelta};

    use crate::dsl::{col, cols, dtype_cols, first, last, len, lit, nth, selectors as cs, series, sum, when};
    use crate::expr::{DataType, Expr};

    /// Expressions that project columns without computing anything.
    pub fn column_selections() -> Vec<Expr> {
        vec![
            col("foo"),
            cols(["foo", "bar"]),
            dtype_cols([DataType::Int64, DataType::Float64]),
            cs::temporal() - cs::time(),
            cs::numeric().exclude(["value"]),
            nth(2),
            first(),
            last(),
        ]
    }

    /// Expressions that compute something from their columns.
    pub fn computations() -> Vec<Expr> {
        vec![
            col("foo") + 100,
            col("foo").floor_div(col("bar")),
            col("foo") * col("bar"),
            cs::numeric() * 100,
        ]
    }

    pub fn literal_values() -> Vec<Expr> {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let time = NaiveTime::from_hms_opt(10, 30, 45).unwrap();
        vec![
            lit(None::<i64>),
            lit(1234),
            lit(567.89),
            lit(f64::INFINITY),
            lit(f64::NEG_INFINITY),
            lit(f64::NAN),
            lit(date),
            lit(date.and_time(time)),
            lit(time),
            lit(TimeDelta::hours(-24)),
            lit(vec![1, 2, 3]),
            lit(series("", [None::<i64>, None, None])),
            lit(vec![vec![10, 20], vec![30, 40]]),
            lit("this is the way"),
        ]
    }

    /// A mixed bag covering every wrapper and most node kinds.
    pub fn assorted() -> Vec<Expr> {
        let mut exprs = column_selections();
        exprs.extend(computations());
        exprs.extend(literal_values());
        exprs.extend([
            col("foo").alias("bar"),
            (col("foo") * col("bar")).alias("baz").alias("qux"),
            col("foo").name().keep(),
            col("foo").name().suffix("_x").alias("y"),
            col("^foo.*$").name().prefix("p_"),
            sum("foo").over([col("groups")]),
            sum("foo").slice(len() - 10, col("bar")),
            col("foo").filter(col("bar").eq(13)),
            when(col("a").gt(1)).then(col("b")).otherwise(col("c")),
            cols(["a", "b"]).sum().alias("total"),
            col("s").sort_by([col("t").alias("u")]).gather(lit(0)),
            len(),
        ]);
        exprs
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::dsl::{all, col, cols, extension, first, last, len, lit, nth, selectors as cs, series, sum};
    use crate::expr::{Expr, SeriesLiteral};
    use crate::meta::MetaError;

    #[test]
    fn root_names_of_binary_expression() {
        let expr = col("foo") * col("bar");
        assert_eq!(expr.meta().output_name().unwrap(), "foo");
        assert_eq!(expr.meta().root_names(), vec!["foo", "bar"]);
    }

    #[test]
    fn root_names_include_filter_predicate() {
        let expr = col("foo").filter(col("bar").eq(13));
        assert_eq!(expr.meta().root_names(), vec!["foo", "bar"]);
        assert_eq!(expr.meta().output_name().unwrap(), "foo");
    }

    #[test]
    fn root_names_of_window_and_slice() {
        let expr = sum("foo").over([col("groups")]);
        assert_eq!(expr.meta().root_names(), vec!["foo", "groups"]);
        assert_eq!(expr.meta().output_name().unwrap(), "foo");

        let expr = sum("foo").slice(len() - 10, col("bar"));
        assert_eq!(expr.meta().root_names(), vec!["foo", "bar"]);
    }

    #[test]
    fn len_is_named_len() {
        assert_eq!(len().meta().output_name().unwrap(), "len");
        assert!(len().meta().root_names().is_empty());
    }

    #[test]
    fn literal_output_names() {
        assert_eq!(lit(1).meta().output_name().unwrap(), "literal");
        assert_eq!(lit(series("abc", [1, 2, 3])).meta().output_name().unwrap(), "abc");
        assert_eq!(lit(SeriesLiteral::unnamed([1, 2, 3])).meta().output_name().unwrap(), "");
        assert_eq!((lit(1) + col("a")).meta().output_name().unwrap(), "literal");
    }

    #[test]
    fn undetermined_output_name() {
        let expr = all().name().suffix("_");
        let err = expr.meta().output_name().unwrap_err();
        assert_eq!(err, MetaError::NamingUndetermined { expr: "cs.all()".to_string() });
        assert_eq!(
            err.to_string(),
            "unable to find root column name for expr 'cs.all()' when calling 'output_name'"
        );

        assert_eq!(expr.meta().output_name_with(true), Err(err));
        assert_eq!(expr.meta().output_name_with(false), Ok(None));
        assert_eq!(expr.meta().try_output_name(), None);
    }

    #[test]
    fn undetermined_names_innermost_blocker() {
        let err = cols(["a", "b"]).sum().meta().output_name().unwrap_err();
        assert_eq!(err, MetaError::naming_undetermined("cols([\"a\", \"b\"])"));

        let err = extension("custom", [col("a")]).meta().output_name().unwrap_err();
        assert_eq!(err, MetaError::naming_undetermined("custom(col(\"a\"))"));
    }

    #[test]
    fn alias_always_names_the_output() {
        let expr = cs::numeric().sum().alias("total");
        assert_eq!(expr.meta().output_name().unwrap(), "total");
        assert!(expr.meta().has_multiple_outputs());
    }

    #[test]
    fn undo_aliases_cases() {
        let cases = [
            (col("foo").alias("bar"), col("foo")),
            ((col("foo") * col("bar")).alias("baz"), col("foo") * col("bar")),
            (col("foo").name().keep(), col("foo")),
            (col("foo").name().suffix("_x"), col("foo")),
            (
                (col("foo").alias("x") * col("bar").alias("y")).alias("z"),
                col("foo") * col("bar"),
            ),
        ];
        for (expr, expected) in cases {
            assert_eq!(expr.meta().undo_aliases(), expected, "{}", expr);
        }
    }

    #[test]
    fn undo_aliases_leaves_input_untouched() {
        let expr = col("foo").alias("bar");
        let _ = expr.meta().undo_aliases();
        assert_eq!(expr.to_string(), "col(\"foo\").alias(\"bar\")");
    }

    #[test]
    fn is_column() {
        assert!(col("foo").meta().is_column(false));
        assert!(!(col("foo") * col("bar")).meta().is_column(false));
        assert!(!lit(1).meta().is_column(false));
        assert!(!col("^foo.*$").meta().is_column(false));

        let aliased = col("foo").alias("bar");
        assert!(!aliased.meta().is_column(false));
        assert!(aliased.meta().is_column(true));
    }

    #[test]
    fn is_literal_across_value_kinds() {
        for expr in literal_values() {
            assert!(expr.meta().is_literal(false), "{}", expr);

            let aliased = expr.alias("xyz");
            assert!(!aliased.meta().is_literal(false), "{}", aliased);
            assert!(aliased.meta().is_literal(true), "{}", aliased);
        }
        assert!(!col("foo").meta().is_literal(true));
        assert!(!(lit(1) + lit(2)).meta().is_literal(true));
    }

    #[test]
    fn is_column_selection_accepts_projections() {
        for expr in column_selections() {
            assert!(expr.meta().is_column_selection(false), "{}", expr);

            let multiple = expr.meta().has_multiple_outputs();
            let renamed = match multiple {
                true => expr.name().suffix("!"),
                false => expr.alias("!"),
            };
            assert!(!renamed.meta().is_column_selection(false), "{}", renamed);
            assert!(renamed.meta().is_column_selection(true), "{}", renamed);
        }
    }

    #[test]
    fn is_column_selection_rejects_computations() {
        for expr in computations() {
            assert!(!expr.meta().is_column_selection(false), "{}", expr);
            let aliased = expr.clone().alias("!");
            assert!(!aliased.meta().is_column_selection(true), "{}", aliased);
        }
    }

    #[test]
    fn regex_projection() {
        assert!(col("^ab.*$").meta().is_regex_projection());
        assert!(col("^ab.*$").alias("x").meta().is_regex_projection());
        assert!(col("^ab.*$").name().suffix("_x").meta().is_regex_projection());
        assert!(!col("ab").meta().is_regex_projection());
        assert!(!col("^ab").meta().is_regex_projection());
        assert!(!col("^.*").meta().is_regex_projection());
        assert!(col("^.*").meta().is_column(false));
        assert!(!col("^ab.*$").sum().meta().is_regex_projection());
    }

    #[test]
    fn multiple_outputs() {
        assert!(cols(["a", "b"]).meta().has_multiple_outputs());
        assert!(cols(["a", "b"]).sum().meta().has_multiple_outputs());
        assert!(cs::numeric().meta().has_multiple_outputs());
        assert!(all().name().suffix("_").meta().has_multiple_outputs());
        assert!(col("^a.*$").name().suffix("_x").meta().has_multiple_outputs());

        assert!(!col("^a.*$").meta().has_multiple_outputs());
        assert!(!col("a").meta().has_multiple_outputs());
        assert!(!(col("a") + lit(1)).meta().has_multiple_outputs());
        assert!(!len().meta().has_multiple_outputs());
    }

    #[test]
    fn positional_columns_have_no_static_name() {
        for expr in [nth(2), first(), last()] {
            assert_eq!(expr.meta().try_output_name(), None, "{}", expr);
            assert!(!expr.meta().has_multiple_outputs(), "{}", expr);
            assert!(expr.meta().root_names().is_empty(), "{}", expr);
        }
        let err = nth(2).sum().meta().output_name().unwrap_err();
        assert_eq!(err, MetaError::naming_undetermined("nth(2)"));
    }

    #[test]
    fn renames_over_regex_columns() {
        let kept = col("^a.*$").name().keep();
        assert_eq!(kept.meta().output_name().unwrap(), "^a.*$");
        assert!(kept.meta().has_multiple_outputs());
        assert!(kept.meta().is_regex_projection());

        let suffixed = col("^a.*$").name().suffix("_x");
        assert_eq!(suffixed.meta().output_name().unwrap(), "^a.*$_x");
        assert!(suffixed.meta().has_multiple_outputs());
    }

    #[test]
    fn quoted_names_are_escaped_in_errors() {
        let err = cols(["a\"b", "c"]).meta().output_name().unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"unable to find root column name for expr 'cols(["a\"b", "c"])' when calling 'output_name'"#
        );
    }

    #[test]
    fn pop_returns_direct_inputs() {
        let expr = col("a") + col("b").alias("c");
        assert_eq!(expr.meta().pop(), vec![col("a"), col("b").alias("c")]);
        assert!(col("a").meta().pop().is_empty());
    }

    #[test]
    fn invariants_hold_for_assorted_expressions() {
        for expr in assorted() {
            let meta = expr.meta();
            let undone = meta.undo_aliases();

            assert_eq!(undone.meta().undo_aliases(), undone, "{}", expr);
            assert_eq!(undone.meta().root_names(), meta.root_names(), "{}", expr);
            assert_eq!(meta.try_output_name().is_some(), meta.output_name().is_ok(), "{}", expr);
            assert_eq!(meta.pop().len(), expr.children().len(), "{}", expr);

            if let Expr::Alias(_, name) = &expr {
                assert_eq!(&meta.output_name().unwrap(), name);
            }
            if meta.is_column(false) {
                assert!(meta.is_column_selection(false), "{}", expr);
            }
            if meta.is_column(true) {
                assert!(!meta.has_multiple_outputs(), "{}", expr);
            }
        }
    }

    #[test]
    fn expressions_survive_json_round_trip() {
        for expr in assorted() {
            let json = serde_json::to_string(&expr).unwrap();
            let back: Expr = serde_json::from_str(&json).unwrap();
            assert_eq!(back, expr, "{}", json);
        }
    }
}
