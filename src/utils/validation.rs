use uuid::{Uuid, Version};

use crate::error::{Error, Result};

const HYPHENATED_LEN: usize = 36;

/// Parses a job identifier taken from the request path. Only the hyphenated
/// form of a v4 UUID is accepted, exactly as the store issues it; anything
/// else is an invalid identifier and never reaches the store.
pub fn parse_job_id(raw: &str) -> Result<Uuid> {
    let invalid = || Error::InvalidIdentifier(raw.to_string());
    if raw.len() != HYPHENATED_LEN {
        return Err(invalid());
    }
    let id = Uuid::try_parse(raw).map_err(|_| invalid())?;
    match id.get_version() {
        Some(Version::Random) => Ok(id),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_job_id(&id.to_string()).unwrap(), id);
        assert_eq!(parse_job_id(&id.to_string().to_uppercase()).unwrap(), id);
    }

    #[test]
    fn rejects_malformed_ids() {
        for raw in ["12345", "", "not-a-uuid", "64b7f0c2e13a4f0012345678"] {
            assert!(matches!(
                parse_job_id(raw),
                Err(Error::InvalidIdentifier(_))
            ));
        }
    }

    #[test]
    fn rejects_padded_and_alternate_forms() {
        let id = Uuid::new_v4();
        let forms = [
            format!(" {}", id),
            format!("{} ", id),
            id.simple().to_string(),
            id.braced().to_string(),
            id.urn().to_string(),
        ];
        for raw in &forms {
            assert!(
                matches!(parse_job_id(raw), Err(Error::InvalidIdentifier(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_non_v4_uuids() {
        assert!(matches!(
            parse_job_id(&Uuid::nil().to_string()),
            Err(Error::InvalidIdentifier(_))
        ));
        assert!(matches!(
            parse_job_id("6ba7b810-9dad-11d1-80b4-00c04fd430c8"),
            Err(Error::InvalidIdentifier(_))
        ));
    }
}
