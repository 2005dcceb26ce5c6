use crate::task::VolunteerTask;

pub const ITEMS_PER_PAGE: usize = 6;

/// One page of an already filtered
/// collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
  pub tasks:          Vec<&'a VolunteerTask>,
  pub current_page:   usize,
  pub total_pages:    usize,
  pub items_per_page: usize
}

impl Page<'_> {
  /// An empty collection still shows as
  /// a single page.
  pub fn display_total_pages(
    &self
  ) -> usize {
    self.total_pages.max(1)
  }
}

pub fn total_pages(
  count: usize,
  items_per_page: usize
) -> usize {
  if items_per_page == 0 {
    return 0;
  }
  count.div_ceil(items_per_page)
}

/// Slices `[(page-1)*n, page*n)` out of
/// `filtered`, clipped to its length. A
/// page past the end (or page 0) is
/// empty.
pub fn paginate<'a>(
  filtered: &[&'a VolunteerTask],
  current_page: usize,
  items_per_page: usize
) -> Page<'a> {
  let total =
    total_pages(filtered.len(), items_per_page);

  let tasks = if current_page == 0 {
    Vec::new()
  } else {
    let start = (current_page - 1)
      .saturating_mul(items_per_page);
    let end = start
      .saturating_add(items_per_page)
      .min(filtered.len());
    filtered
      .get(start..end)
      .map(|slice| slice.to_vec())
      .unwrap_or_default()
  };

  Page {
    tasks,
    current_page,
    total_pages: total,
    items_per_page
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::{
    ITEMS_PER_PAGE,
    paginate,
    total_pages
  };
  use crate::task::VolunteerTask;

  fn make(n: u64) -> Vec<VolunteerTask> {
    let date =
      NaiveDate::from_ymd_opt(2024, 5, 1)
        .expect("date");
    (1..=n)
      .map(|id| {
        VolunteerTask::new(
          id,
          format!("task {id}"),
          "setup",
          date
        )
      })
      .collect()
  }

  #[test]
  fn eight_tasks_make_two_pages() {
    let tasks = make(8);
    let refs: Vec<&VolunteerTask> =
      tasks.iter().collect();

    let first =
      paginate(&refs, 1, ITEMS_PER_PAGE);
    let second =
      paginate(&refs, 2, ITEMS_PER_PAGE);

    assert_eq!(first.total_pages, 2);
    assert_eq!(first.tasks.len(), 6);
    assert_eq!(second.tasks.len(), 2);
    assert_eq!(second.tasks[0].id, 7);
  }

  #[test]
  fn pages_partition_the_collection() {
    for n in [0_u64, 1, 5, 6, 7, 12, 13]
    {
      let tasks = make(n);
      let refs: Vec<&VolunteerTask> =
        tasks.iter().collect();
      let pages = total_pages(
        refs.len(),
        ITEMS_PER_PAGE
      );

      let mut seen = Vec::new();
      for p in 1..=pages {
        let page = paginate(
          &refs,
          p,
          ITEMS_PER_PAGE
        );
        assert!(
          page.tasks.len()
            <= ITEMS_PER_PAGE
        );
        seen.extend(
          page.tasks.iter().map(|t| t.id)
        );
      }

      let expected: Vec<u64> =
        (1..=n).collect();
      assert_eq!(seen, expected);
    }
  }

  #[test]
  fn out_of_range_pages_are_empty() {
    let tasks = make(3);
    let refs: Vec<&VolunteerTask> =
      tasks.iter().collect();

    assert!(
      paginate(&refs, 4, ITEMS_PER_PAGE)
        .tasks
        .is_empty()
    );
    assert!(
      paginate(&refs, 0, ITEMS_PER_PAGE)
        .tasks
        .is_empty()
    );
  }

  #[test]
  fn empty_collection_displays_one_page()
  {
    let page =
      paginate(&[], 1, ITEMS_PER_PAGE);
    assert_eq!(page.total_pages, 0);
    assert_eq!(
      page.display_total_pages(),
      1
    );
  }
}
