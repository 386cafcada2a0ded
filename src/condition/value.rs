use {
    crate::string_list_impls,
    chrono::{DateTime, SecondsFormat, TimeZone, Utc},
    ipnet::IpNet,
    log::debug,
    serde::{
        de::{self, value::SeqAccessDeserializer, Deserializer, SeqAccess, Unexpected, Visitor},
        Deserialize,
    },
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        net::IpAddr,
    },
};

/// The value side of a condition clause.
///
/// IAM only carries strings on the wire, so booleans, numbers, dates, and addresses are converted to their string
/// form when the value is built. Dates are rendered in UTC with millisecond precision (`2020-04-01T00:00:00.000Z`).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ConditionValue {
    Single(String),
    List(Vec<String>),
}

string_list_impls!(ConditionValue);

impl ConditionValue {
    /// A `BinaryEquals` value: the bytes encoded as standard base64.
    pub fn binary(bytes: &[u8]) -> Self {
        Self::Single(base64::encode(bytes))
    }
}

fn render_date<Tz: TimeZone>(d: &DateTime<Tz>) -> String {
    d.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl Display for ConditionValue {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Single(s) => f.write_str(s),
            Self::List(s_list) => write!(f, "[{}]", s_list.join(", ")),
        }
    }
}

impl From<&String> for ConditionValue {
    fn from(v: &String) -> Self {
        Self::Single(v.clone())
    }
}

impl From<bool> for ConditionValue {
    fn from(v: bool) -> Self {
        Self::Single(v.to_string())
    }
}

macro_rules! from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ConditionValue {
                fn from(v: $t) -> Self {
                    Self::Single(v.to_string())
                }
            }
        )*
    };
}

from_number!(i32, i64, u32, u64, f64);

impl<Tz: TimeZone> From<DateTime<Tz>> for ConditionValue {
    fn from(v: DateTime<Tz>) -> Self {
        Self::Single(render_date(&v))
    }
}

impl From<IpNet> for ConditionValue {
    fn from(v: IpNet) -> Self {
        Self::Single(v.to_string())
    }
}

impl From<IpAddr> for ConditionValue {
    fn from(v: IpAddr) -> Self {
        Self::Single(v.to_string())
    }
}

impl From<&[&str]> for ConditionValue {
    fn from(v: &[&str]) -> Self {
        Self::List(v.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ConditionValue {
    fn from(v: [&str; N]) -> Self {
        Self::List(v.iter().map(|s| s.to_string()).collect())
    }
}

impl From<Vec<DateTime<Utc>>> for ConditionValue {
    fn from(v: Vec<DateTime<Utc>>) -> Self {
        Self::List(v.iter().map(render_date).collect())
    }
}

impl From<Vec<IpNet>> for ConditionValue {
    fn from(v: Vec<IpNet>) -> Self {
        Self::List(v.iter().map(IpNet::to_string).collect())
    }
}

/// A single scalar read from a condition document, normalized to a string.
struct Scalar(String);

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = Scalar;

    fn expecting(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "string, boolean, or number")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(Scalar(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Scalar(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Scalar(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Scalar(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(Scalar(v.to_string()))
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ScalarVisitor)
    }
}

struct ConditionValueVisitor;

impl<'de> Visitor<'de> for ConditionValueVisitor {
    type Value = ConditionValue;

    fn expecting(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "condition value or list of condition values")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(ConditionValue::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(ConditionValue::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(ConditionValue::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(ConditionValue::from(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(ConditionValue::from(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, access: A) -> Result<Self::Value, A::Error> {
        let deserializer = SeqAccessDeserializer::new(access);
        match Vec::<Scalar>::deserialize(deserializer) {
            Ok(l) => Ok(ConditionValue::List(l.into_iter().map(|s| s.0).collect())),
            Err(e) => {
                debug!("Failed to deserialize condition value list: {:?}", e);
                Err(<A::Error as de::Error>::invalid_value(Unexpected::Seq, &self))
            }
        }
    }
}

impl<'de> Deserialize<'de> for ConditionValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ConditionValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::ConditionValue,
        chrono::{DateTime, Utc},
        ipnet::IpNet,
        pretty_assertions::assert_eq,
        std::{net::IpAddr, str::FromStr},
    };

    #[test_log::test]
    fn test_scalar_normalization() {
        assert_eq!(ConditionValue::from(true), ConditionValue::Single("true".to_string()));
        assert_eq!(ConditionValue::from(false).to_string(), "false");
        assert_eq!(ConditionValue::from(3600_u32).to_string(), "3600");
        assert_eq!(ConditionValue::from(-5_i64).to_string(), "-5");
        assert_eq!(ConditionValue::from(1.5_f64).to_string(), "1.5");
        assert_eq!(ConditionValue::from(2.0_f64).to_string(), "2");
        assert_eq!(ConditionValue::from(&"prod".to_string()).to_string(), "prod");
    }

    #[test_log::test]
    fn test_dates() {
        let d = DateTime::parse_from_rfc3339("2020-04-01T00:00:00Z").unwrap().with_timezone(&Utc);
        assert_eq!(ConditionValue::from(d).to_string(), "2020-04-01T00:00:00.000Z");

        let offset = DateTime::parse_from_rfc3339("2020-04-01T02:30:00.250+02:00").unwrap();
        assert_eq!(ConditionValue::from(offset).to_string(), "2020-04-01T00:30:00.250Z");

        let later = DateTime::parse_from_rfc3339("2021-01-01T12:00:00Z").unwrap().with_timezone(&Utc);
        let list = ConditionValue::from(vec![d, later]);
        assert_eq!(list.to_vec(), vec!["2020-04-01T00:00:00.000Z", "2021-01-01T12:00:00.000Z"]);
    }

    #[test_log::test]
    fn test_addresses() {
        let net = IpNet::from_str("10.0.0.0/8").unwrap();
        assert_eq!(ConditionValue::from(net).to_string(), "10.0.0.0/8");
        let addr = IpAddr::from_str("192.0.2.1").unwrap();
        assert_eq!(ConditionValue::from(addr).to_string(), "192.0.2.1");
        let nets = ConditionValue::from(vec![net, IpNet::from_str("2001:db8::/32").unwrap()]);
        assert_eq!(nets.to_vec(), vec!["10.0.0.0/8", "2001:db8::/32"]);
    }

    #[test_log::test]
    fn test_binary() {
        assert_eq!(ConditionValue::binary(b"hello").to_string(), "aGVsbG8=");
    }

    #[test_log::test]
    fn test_lists() {
        let l1 = ConditionValue::from(vec!["a", "b"]);
        let l2 = ConditionValue::from(["a", "b"]);
        let l3 = ConditionValue::from(&["a", "b"][..]);
        let l4 = ConditionValue::from(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(l1, l2);
        assert_eq!(l2, l3);
        assert_eq!(l3, l4);
        assert!(l1.is_list());
        assert_eq!(l1.len(), 2);
        assert_eq!(l1.to_string(), "[a, b]");
        assert!(ConditionValue::List(vec![]).is_empty());
        assert!(!ConditionValue::from("a").is_empty());
        assert!(!ConditionValue::from("a").is_list());
    }

    #[test_log::test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&ConditionValue::from(true)).unwrap(), r#""true""#);
        assert_eq!(serde_json::to_string(&ConditionValue::from(vec!["x"])).unwrap(), r#"["x"]"#);

        let v: ConditionValue = serde_json::from_str(r#"[1, true, "x", 2.5]"#).unwrap();
        assert_eq!(v, ConditionValue::from(vec!["1", "true", "x", "2.5"]));
        let v: ConditionValue = serde_json::from_str("false").unwrap();
        assert_eq!(v, ConditionValue::from("false"));

        let e = serde_json::from_str::<ConditionValue>("[{}]").unwrap_err();
        assert_eq!(
            e.to_string(),
            "invalid value: sequence, expected condition value or list of condition values at line 1 column 4"
        );
        let e = serde_json::from_str::<ConditionValue>("null").unwrap_err();
        assert_eq!(
            e.to_string(),
            "invalid type: null, expected condition value or list of condition values at line 1 column 4"
        );
    }
}
