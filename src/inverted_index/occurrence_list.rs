use super::doc_map::Occurrence;

/// Midpoint indexes checked while placing an occurrence.
pub type Probes = Vec<usize>;

/// Moves the last occurrence of `occurrences` into place.
///
/// Entries `0..n-1` must already be in descending frequency order. The new
/// entry is located by binary search over that prefix and lands after every
/// existing entry with the same frequency.
///
/// Returns the midpoints probed by the search, or `None` when the list holds
/// fewer than two entries and nothing had to be searched.
pub fn insert_last_occurrence(occurrences: &mut Vec<Occurrence>) -> Option<Probes> {
    if occurrences.len() < 2 {
        return None;
    }

    let last = occurrences.len() - 1;
    let target = occurrences[last].frequency;

    let mut probes = Probes::new();
    let mut low = 0;
    // Exclusive bound, `high` = last index of the sorted prefix plus one.
    let mut high = last;
    let mut mid = 0;
    let mut found = false;

    while low < high {
        mid = (low + high - 1) / 2;
        probes.push(mid);

        let frequency = occurrences[mid].frequency;
        if frequency == target {
            found = true;
            break;
        } else if frequency < target {
            high = mid;
        } else {
            low = mid + 1;
        }
    }

    let position = if found {
        let mut position = mid + 1;
        while position < last && occurrences[position].frequency == target {
            position += 1;
        }
        position
    } else if occurrences[mid].frequency >= target {
        mid + 1
    } else {
        mid
    };

    if position != last {
        let occurrence = occurrences.remove(last);
        occurrences.insert(position, occurrence);
    }

    Some(probes)
}
