use std::ops::Index;

/// Implement Display for a given class by formatting it as pretty-printed JSON.
#[macro_export]
macro_rules! display_json {
    ($cls:ident) => {
        impl std::fmt::Display for $cls {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                let buf = Vec::new();
                let serde_formatter = ::serde_json::ser::PrettyFormatter::with_indent(b"    ");
                let mut ser = ::serde_json::Serializer::with_formatter(buf, serde_formatter);
                match self.serialize(&mut ser) {
                    Ok(()) => (),
                    Err(e) => {
                        ::log::error!("Failed to serialize: {}", e);
                        return Err(::std::fmt::Error {});
                    }
                };
                match std::str::from_utf8(&ser.into_inner()) {
                    Ok(s) => write!(f, "{}", s),
                    Err(e) => {
                        ::log::error!("JSON serialization contained non-UTF-8 characters: {}", e);
                        Err(::std::fmt::Error {})
                    }
                }
            }
        }
    };
}

/// Implement FromStr for a given class by parsing it as JSON.
#[macro_export]
macro_rules! from_str_json {
    ($cls:ident) => {
        impl ::std::str::FromStr for $cls {
            type Err = ::serde_json::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match ::serde_json::from_str::<Self>(s) {
                    Ok(result) => Ok(result),
                    Err(e) => {
                        ::log::debug!("Failed to parse: {}: {:?}", s, e);
                        Err(e)
                    }
                }
            }
        }
    };
}

/// Implement the shared string-or-list operations for an enum with `Single(String)` and `List(Vec<String>)`
/// variants: accessors, conversions from strings and string vectors, and serialization as a bare string or array.
#[macro_export]
macro_rules! string_list_impls {
    ($cls:ident) => {
        impl $cls {
            pub fn to_vec(&self) -> Vec<&str> {
                match self {
                    Self::Single(s) => vec![s.as_str()],
                    Self::List(s_list) => s_list.iter().map(String::as_str).collect(),
                }
            }

            pub fn is_empty(&self) -> bool {
                match self {
                    Self::Single(_) => false,
                    Self::List(s_list) => s_list.is_empty(),
                }
            }

            pub fn len(&self) -> usize {
                match self {
                    Self::Single(_) => 1,
                    Self::List(s_list) => s_list.len(),
                }
            }

            #[inline]
            pub fn is_list(&self) -> bool {
                matches!(self, Self::List(_))
            }
        }

        impl From<&str> for $cls {
            fn from(v: &str) -> Self {
                Self::Single(v.to_string())
            }
        }

        impl From<String> for $cls {
            fn from(v: String) -> Self {
                Self::Single(v)
            }
        }

        impl From<Vec<String>> for $cls {
            fn from(v: Vec<String>) -> Self {
                Self::List(v)
            }
        }

        impl From<Vec<&str>> for $cls {
            fn from(v: Vec<&str>) -> Self {
                Self::List(v.into_iter().map(String::from).collect())
            }
        }

        impl ::serde::Serialize for $cls {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self {
                    Self::Single(v) => ::serde::Serialize::serialize(v, serializer),
                    Self::List(v) => ::serde::Serialize::serialize(v, serializer),
                }
            }
        }
    };
}

/// StringList holds a JSON field that may be a string or list of strings.
///
/// Statements rendered by this crate always use the list form.
#[derive(Clone, Debug)]
pub enum StringList {
    Single(String),
    List(Vec<String>),
}

string_list_impls!(StringList);

impl StringList {
    pub fn contains(&self, value: &str) -> bool {
        match self {
            Self::Single(s) => s == value,
            Self::List(s_list) => s_list.iter().any(|s| s == value),
        }
    }
}

impl Index<usize> for StringList {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        match self {
            Self::Single(v) => {
                if index == 0 {
                    v
                } else {
                    panic!("index out of bounds: the len is 1 but the index is {}", index);
                }
            }
            Self::List(v) => &v[index],
        }
    }
}

impl PartialEq<StringList> for StringList {
    fn eq(&self, other: &StringList) -> bool {
        match (self, other) {
            (Self::Single(my_el), Self::Single(other_el)) => my_el == other_el,
            (Self::Single(my_el), Self::List(other_el)) => other_el.len() == 1 && my_el == &other_el[0],
            (Self::List(my_el), Self::Single(other_el)) => my_el.len() == 1 && &my_el[0] == other_el,
            (Self::List(my_el), Self::List(other_el)) => my_el == other_el,
        }
    }
}

impl Eq for StringList {}

#[cfg(test)]
mod tests {
    use {
        crate::serutil::StringList,
        pretty_assertions::{assert_eq, assert_ne},
        serde::Serialize,
        std::panic::catch_unwind,
    };

    #[test_log::test]
    fn test_basic_ops() {
        let sl1a = StringList::from("ecr:PutImage");
        let sl1b = StringList::from(vec!["ecr:PutImage"]);
        let sl2 = StringList::from(vec!["ecr:PutImage", "ecr:BatchGetImage"]);
        let sl3 = StringList::List(vec![]);

        assert_eq!(sl1a, sl1b);
        assert_eq!(sl1b, sl1a);
        assert_ne!(sl1a, sl2);
        assert_ne!(sl2, sl1b);

        assert!(!sl1a.is_empty());
        assert!(!sl2.is_empty());
        assert!(sl3.is_empty());
        assert_eq!(sl1a.len(), 1);
        assert_eq!(sl2.len(), 2);
        assert_eq!(sl3.len(), 0);

        assert!(sl2.contains("ecr:BatchGetImage"));
        assert!(!sl1a.contains("ecr:BatchGetImage"));
        assert_eq!(sl2.to_vec(), vec!["ecr:PutImage", "ecr:BatchGetImage"]);
        assert_eq!(&sl1a[0], "ecr:PutImage");
        assert_eq!(&sl2[1], "ecr:BatchGetImage");

        let e = catch_unwind(|| {
            let single = StringList::from("ecr:PutImage");
            println!("This won't print: {}", &single[1]);
        })
        .unwrap_err();
        assert_eq!(*e.downcast::<String>().unwrap(), "index out of bounds: the len is 1 but the index is 1");
    }

    #[test_log::test]
    fn test_serialize() {
        assert_eq!(serde_json::to_string(&StringList::from("a")).unwrap(), r#""a""#);
        assert_eq!(serde_json::to_string(&StringList::from(vec!["a"])).unwrap(), r#"["a"]"#);
        assert_eq!(serde_json::to_string(&StringList::List(vec![])).unwrap(), "[]");
        assert!(StringList::from(vec!["a"]).is_list());
        assert!(!StringList::from("a".to_string()).is_list());
    }

    #[derive(Clone, Debug)]
    struct SerFail {}
    display_json!(SerFail);

    impl Serialize for SerFail {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("Serialization failed"))
        }
    }

    #[test_log::test]
    fn test_ser_fail() {
        let e = catch_unwind(|| SerFail {}.to_string()).unwrap_err();
        let e2 = e.downcast::<String>().unwrap();
        assert!((*e2).contains("a Display implementation returned an error"));
    }
}
