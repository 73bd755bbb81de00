pub const TAG_INPUT_SEPARATOR: char =
  ',';
pub const TAG_DISPLAY_SEPARATOR: &str =
  ", ";

/// Splits the tag field on commas,
/// trimming each entry and dropping
/// the empty ones. Order and
/// duplicates are kept.
pub fn split_tags(
  text: &str
) -> Vec<String> {
  text
    .split(TAG_INPUT_SEPARATOR)
    .map(str::trim)
    .filter(|value| !value.is_empty())
    .map(ToString::to_string)
    .collect()
}

pub fn join_tags(
  tags: &[String]
) -> String {
  tags.join(TAG_DISPLAY_SEPARATOR)
}

pub fn push_tag_unique(
  tags: &mut Vec<String>,
  tag: &str
) -> bool {
  if tags
    .iter()
    .any(|existing| existing == tag)
  {
    return false;
  }

  tags.push(tag.to_string());
  true
}

/// Distinct tags in order of first
/// appearance.
pub fn distinct_tags<'a, I>(
  tag_lists: I
) -> Vec<String>
where
  I: IntoIterator<Item = &'a [String]>
{
  let mut out = Vec::new();
  for tags in tag_lists {
    for tag in tags {
      push_tag_unique(&mut out, tag);
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  fn owned(
    values: &[&str]
  ) -> Vec<String> {
    values
      .iter()
      .map(ToString::to_string)
      .collect()
  }

  #[test]
  fn split_tags_trims_and_drops_empty_entries(
  ) {
    assert_eq!(
      split_tags("a, b ,, c"),
      owned(&["a", "b", "c"])
    );
    assert!(
      split_tags(" , ,").is_empty()
    );
    assert!(split_tags("").is_empty());
  }

  #[test]
  fn split_tags_keeps_duplicates_and_order(
  ) {
    assert_eq!(
      split_tags("z,a,z"),
      owned(&["z", "a", "z"])
    );
  }

  #[test]
  fn joined_tags_split_back_unchanged() {
    let tags = owned(&["x", "y"]);
    let joined = join_tags(&tags);
    assert_eq!(joined, "x, y");
    assert_eq!(
      split_tags(&joined),
      tags
    );
  }

  #[test]
  fn distinct_tags_follows_first_appearance(
  ) {
    let first = owned(&["infra", "ops"]);
    let second =
      owned(&["design", "infra"]);
    let third = owned(&["ops", "ops"]);

    let cloud = distinct_tags([
      first.as_slice(),
      second.as_slice(),
      third.as_slice()
    ]);
    assert_eq!(
      cloud,
      owned(&["infra", "ops", "design"])
    );
  }
}
