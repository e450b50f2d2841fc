/// Length of the longest ordered prefix shared by every sequence.
///
/// Returns 0 for no sequences. Elements are compared by value.
pub fn common_prefix_len<T: PartialEq>(seqs: &[&[T]]) -> usize {
    let Some((first, rest)) = seqs.split_first() else {
        return 0;
    };
    rest.iter().fold(first.len(), |len, seq| {
        first[..len]
            .iter()
            .zip(seq.iter())
            .take_while(|(a, b)| a == b)
            .count()
    })
}
