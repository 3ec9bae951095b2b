//! Tarball listing and member extraction.

use std::io::{Read, Write};

use tar::{Archive, Builder, Entry, EntryType};

use crate::error::Error;

fn invalid(err: impl ToString) -> Error {
    Error::InvalidTar {
        message: err.to_string(),
    }
}

fn entry_path<R: Read>(entry: &Entry<'_, R>) -> String {
    String::from_utf8_lossy(&entry.path_bytes()).into_owned()
}

/// Walks the members of an uncompressed tarball.
///
/// Long names and pax paths are resolved by the reader, and pax global
/// headers are skipped. `visit` gets the member path and the entry.
fn walk<'d, F>(data: &'d [u8], mut visit: F) -> Result<(), Error>
where
    F: FnMut(String, &mut Entry<'_, &'d [u8]>) -> Result<(), Error>,
{
    let mut archive = Archive::new(data);
    for entry in archive.entries().map_err(invalid)? {
        let mut entry = entry.map_err(invalid)?;
        if entry.header().entry_type() == EntryType::XGlobalHeader {
            continue;
        }
        let path = entry_path(&entry);
        visit(path, &mut entry)?;
    }
    Ok(())
}

/// Paths of all members, in archive order.
///
/// # Errors
///
/// Returns [`Error::InvalidTar`] on truncated data, bad numeric fields or
/// checksum mismatches.
pub fn member_paths(data: &[u8]) -> Result<Vec<String>, Error> {
    let mut paths = Vec::new();
    walk(data, |path, _| {
        paths.push(path);
        Ok(())
    })?;
    Ok(paths)
}

/// Returns `true` if the archive path `path` is selected by `member`.
///
/// A member selects itself and, for directories, everything below it.
pub fn matches_member(path: &str, member: &str) -> bool {
    let path = path.trim_end_matches('/');
    let member = member.trim_end_matches('/');
    path == member
        || path
            .strip_prefix(member)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Writes a tarball holding only the members selected by `members`.
///
/// # Errors
///
/// Returns [`Error::MissingMembers`] for requested paths that matched nothing,
/// after the matching members have been written.
pub fn write_members(
    data: &[u8],
    members: &[String],
    output: &mut dyn Write,
) -> Result<(), Error> {
    let mut found = vec![false; members.len()];
    let mut builder = Builder::new(output);

    walk(data, |path, entry| {
        let mut selected = false;
        for (member, hit) in members.iter().zip(found.iter_mut()) {
            if matches_member(&path, member) {
                *hit = true;
                selected = true;
            }
        }
        if !selected {
            return Ok(());
        }

        let mut body = Vec::new();
        entry.read_to_end(&mut body).map_err(invalid)?;
        if body.len() as u64 != entry.size() {
            return Err(invalid("truncated member data"));
        }

        let mut header = entry.header().clone();
        header.set_size(body.len() as u64);
        builder.append_data(&mut header, &path, &body[..])?;
        Ok(())
    })?;
    builder.finish()?;

    let missing: Vec<String> = members
        .iter()
        .zip(&found)
        .filter(|(_, hit)| !**hit)
        .map(|(member, _)| member.clone())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingMembers { paths: missing })
    }
}
