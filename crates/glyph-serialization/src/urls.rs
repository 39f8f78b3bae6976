//! URL joining

use crate::error::UrlError;
use url::Url;

/// Join `parts` onto `base`, left to right
///
/// Each part is resolved against the URL built so far, the way a browser
/// resolves a link: relative parts extend the current directory (keep the
/// trailing `/` on directory parts), absolute parts replace everything.
///
/// ```
/// use glyph_serialization::urljoin;
///
/// let url = urljoin("http://www.bokeh.com", &["test1/", "test2/", "bokeh.html"]).unwrap();
/// assert_eq!(url, "http://www.bokeh.com/test1/test2/bokeh.html");
/// ```
///
/// # Errors
///
/// [`UrlError::InvalidUrl`] if `base` is not an absolute URL or a part
/// cannot be resolved.
pub fn urljoin<S: AsRef<str>>(base: &str, parts: &[S]) -> Result<String, UrlError> {
    let mut current = Url::parse(base).map_err(|e| UrlError::invalid(base, e))?;
    for part in parts {
        let part = part.as_ref();
        current = current.join(part).map_err(|e| UrlError::invalid(part, e))?;
    }
    Ok(current.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_part() {
        assert_eq!(
            urljoin("http://www.bokeh.com", &["test/"]).unwrap(),
            "http://www.bokeh.com/test/"
        );
    }

    #[test]
    fn many_parts() {
        let url = urljoin(
            "http://www.bokeh.com",
            &["test1/", "test2/", "test3/", "bokeh.html"],
        )
        .unwrap();
        assert_eq!(url, "http://www.bokeh.com/test1/test2/test3/bokeh.html");
    }

    #[test]
    fn absolute_part_replaces_base() {
        let url = urljoin(
            "http://www.notbokeh.com",
            &["http://www.bokeh.com/", "test1/", "bokeh1.squig"],
        )
        .unwrap();
        assert_eq!(url, "http://www.bokeh.com/test1/bokeh1.squig");
    }

    #[test]
    fn part_without_slash_replaces_last_segment() {
        let url = urljoin("http://host/a/b", &["c"]).unwrap();
        assert_eq!(url, "http://host/a/c");
    }

    #[test]
    fn no_parts_normalizes_base() {
        assert_eq!(urljoin::<&str>("http://host", &[]).unwrap(), "http://host/");
    }

    #[test]
    fn relative_base_is_rejected() {
        let err = urljoin("test/", &["x"]).unwrap_err();
        assert!(matches!(err, UrlError::InvalidUrl { ref input, .. } if input == "test/"));
    }
}
