use std::fmt;

/// Writes the items of `I` with `&str` in between.
pub struct StrSep<'a, I>(pub I, pub &'a str);

/// Writes the items of `I` one per line.
pub struct PerLine<I>(pub I);

fn fmt_sep<I, T>(
    iter: I,
    sep: &str,
    f: &mut fmt::Formatter<'_>,
    mut fmt_one: impl FnMut(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
) -> fmt::Result
where
    I: IntoIterator<Item = T>,
{
    for (i, item) in iter.into_iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        fmt_one(&item, f)?;
    }
    Ok(())
}

macro_rules! impl_fmt {
    ( $( $fmt:ident )* ) => { $(
        impl<I, T: fmt::$fmt> fmt::$fmt for StrSep<'_, I>
        where
            I: IntoIterator<Item = T> + Clone,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt_sep(self.0.clone(), self.1, f, <T as fmt::$fmt>::fmt)
            }
        }
        impl<I, T: fmt::$fmt> fmt::$fmt for PerLine<I>
        where
            I: IntoIterator<Item = T> + Clone,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt_sep(self.0.clone(), "\n", f, <T as fmt::$fmt>::fmt)
            }
        }
    )* }
}

impl_fmt! { Debug Display }

#[test]
fn sanity_check() {
    let a = ["a", "", "b"];
    assert_eq!(format!("{}", StrSep(&a[..0], "|")), "");
    assert_eq!(format!("{}", StrSep(&a[..1], "|")), "a");
    assert_eq!(format!("{}", StrSep(&a, "|")), "a||b");
    assert_eq!(format!("{:?}", StrSep(&a, ", ")), r#""a", "", "b""#);

    assert_eq!(format!("{}", PerLine(&a[..0])), "");
    assert_eq!(format!("{}", PerLine(&a)), "a\n\nb");
}

#[test]
fn formatting() {
    let a = ["x", "yy"];
    assert_eq!(format!("[{:>3}]", StrSep(&a, "\t")), "[  x\t yy]");
    assert_eq!(format!("{}", StrSep(a.iter().map(|s| s.len()), "+")), "1+2");
    assert_eq!(format!("{:02}", PerLine(1..3)), "01\n02");
}
