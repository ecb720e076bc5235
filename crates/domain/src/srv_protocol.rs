use crate::errors::DomainError;

/// SRV protocol keywords and the query name templates they expand to.
/// `%s` is replaced by the logical query.
pub const SRV_PROTOCOLS: &[(&str, &str)] = &[
    ("msdcs", "_ldap._tcp.dc._msdcs.%s"),
    ("kerberos", "_kerberos._tcp.%s"),
    ("xmppsrv", "_xmpp-server._tcp.%s"),
    ("xmppclient", "_xmpp-client._tcp.%s"),
    ("sip", "_sip._tcp.%s"),
];

pub fn srv_template(keyword: &str) -> Result<&'static str, DomainError> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(DomainError::MissingSrvProtocol);
    }

    SRV_PROTOCOLS
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(keyword))
        .map(|(_, template)| *template)
        .ok_or_else(|| DomainError::UnknownSrvProtocol(keyword.to_string()))
}

/// Fully-qualified SRV query name for a protocol keyword.
pub fn srv_query_name(keyword: &str, query: &str) -> Result<String, DomainError> {
    let template = srv_template(keyword)?;
    let name = template.replacen("%s", query.trim_end_matches('.'), 1);
    Ok(format!("{}.", name))
}
