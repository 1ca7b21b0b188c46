use std::fmt;

/// Calls `f` for every slice of `input` between characters of `delims`.
///
/// Empty slices between adjacent delimiters are reported; a trailing
/// delimiter does not produce a trailing empty slice.
pub fn for_each_token<'a, F>(input: &'a str, delims: &str, mut f: F)
where
    F: FnMut(&'a str),
{
    let mut rest = input;
    while !rest.is_empty() {
        match rest.find(|c: char| delims.contains(c)) {
            Some(pos) => {
                f(&rest[..pos]);
                let delim_len = rest[pos..].chars().next().map_or(1, char::len_utf8);
                rest = &rest[pos + delim_len..];
            }
            None => {
                f(rest);
                break;
            }
        }
    }
}

pub fn split(input: &str, delims: &str, skip_empty: bool) -> Vec<String> {
    let mut output = Vec::new();
    for_each_token(input, delims, |token| {
        if !token.is_empty() || !skip_empty {
            output.push(token.to_string());
        }
    });
    output
}

/// Displays the items of an iterable separated by a delimiter.
///
/// ```
/// use kl_toolkit::core::text::stream_join;
///
/// assert_eq!(stream_join(&[5, 4, 3]).to_string(), "5, 4, 3");
/// assert_eq!(stream_join(&[1, 2]).delimiter("|").to_string(), "1|2");
/// assert_eq!(stream_join(Vec::<i32>::new()).empty_string("[]").to_string(), "[]");
/// ```
#[derive(Debug, Clone)]
pub struct StreamJoin<'d, I> {
    items: I,
    delimiter: &'d str,
    empty: &'d str,
}

pub fn stream_join<I>(items: I) -> StreamJoin<'static, I>
where
    I: IntoIterator + Clone,
    I::Item: fmt::Display,
{
    StreamJoin {
        items,
        delimiter: ", ",
        empty: ".",
    }
}

impl<'d, I> StreamJoin<'d, I> {
    pub fn delimiter<'n>(self, delimiter: &'n str) -> StreamJoin<'n, I>
    where
        'd: 'n,
    {
        StreamJoin {
            items: self.items,
            delimiter,
            empty: self.empty,
        }
    }

    /// Printed instead of the items when there are none.
    pub fn empty_string<'n>(self, empty: &'n str) -> StreamJoin<'n, I>
    where
        'd: 'n,
    {
        StreamJoin {
            items: self.items,
            delimiter: self.delimiter,
            empty,
        }
    }
}

impl<I> fmt::Display for StreamJoin<'_, I>
where
    I: IntoIterator + Clone,
    I::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.items.clone().into_iter();
        match iter.next() {
            Some(first) => {
                write!(f, "{}", first)?;
                for item in iter {
                    write!(f, "{}{}", self.delimiter, item)?;
                }
                Ok(())
            }
            None => f.write_str(self.empty),
        }
    }
}
