// Time: O(n*log(n)) | Space: O(n)
// Greedy over the sorted denominations: while every amount in [1, reach] is
// formable, a coin c <= reach + 1 extends the prefix to reach + c.
pub fn min_unreachable_amount(denominations: &[i64]) -> i64 {
    if denominations.is_empty() {
        return 1;
    }

    let mut coins = denominations.to_vec();
    coins.sort_unstable();

    let mut reach = 0i64;
    for coin in coins {
        if coin > reach + 1 {
            return reach + 1;
        }
        reach += coin;
    }

    reach + 1
}
