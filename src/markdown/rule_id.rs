/// A token of the shape `<PREFIX>-<digits>`, where PREFIX is one or more
/// ASCII uppercase letters or digits, e.g. `INPUT-01` or `K8S-3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleId<'a> {
    raw: &'a str,
    prefix: &'a str,
}

impl<'a> RuleId<'a> {
    pub fn parse(raw: &'a str) -> Option<Self> {
        let (prefix, number) = raw.split_once('-')?;

        let prefix_ok = !prefix.is_empty()
            && prefix
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
        let number_ok = !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit());

        (prefix_ok && number_ok).then_some(Self { raw, prefix })
    }

    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    pub fn prefix(&self) -> &'a str {
        self.prefix
    }
}

impl std::fmt::Display for RuleId<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.raw)
    }
}
