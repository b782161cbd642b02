use serde::{Deserialize, Serialize};

/// The geographic location of an IP address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeoLocation {
    pub country: String,
    pub country_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

/// The autonomous system that owns the network of an IP address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AsnLookup {
    /// The autonomous system number (e.g. `AS24940`).
    pub asn: String,
    /// The organization operating the autonomous system.
    pub asn_org: String,
}

/// The result of looking up a single IP address.
///
/// Location and ownership are `null` in the body whenever the service has no data for the address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IpLookup {
    /// The address that was looked up.
    pub ip: String,
    /// The reverse DNS (PTR) name of the address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse_dns: Option<String>,
    #[serde(default)]
    pub location: Option<GeoLocation>,
    #[serde(default)]
    pub asn: Option<AsnLookup>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_full_lookup() {
        let lookup: IpLookup = serde_json::from_str(
            r#"{
                "ip": "1.1.1.1",
                "reverseDns": "one.one.one.one",
                "location": {
                    "country": "Australia",
                    "countryCode": "AU",
                    "latitude": -33.494,
                    "longitude": 143.2104
                },
                "asn": {"asn": "AS13335", "asnOrg": "Cloudflare, Inc."}
            }"#,
        )
        .unwrap();
        assert_eq!(lookup.reverse_dns.as_deref(), Some("one.one.one.one"));
        let location = lookup.location.unwrap();
        assert_eq!(location.country_code, "AU");
        assert_eq!(location.region, None);
        assert_eq!(lookup.asn.unwrap().asn_org, "Cloudflare, Inc.");
    }

    #[test]
    fn decode_null_lookup() {
        let lookup: IpLookup =
            serde_json::from_str(r#"{"ip": "10.0.0.1", "location": null, "asn": null}"#).unwrap();
        assert_eq!(lookup.ip, "10.0.0.1");
        assert!(lookup.location.is_none());
        assert!(lookup.asn.is_none());
    }
}
