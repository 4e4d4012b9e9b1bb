// Expands `$m!` once for every supported arity, from no arguments up to
// eight, passing `argument: Type` pairs.
macro_rules! for_each_arity {
    ($m:ident) => {
        $m!();
        $m!(a1: A1);
        $m!(a1: A1, a2: A2);
        $m!(a1: A1, a2: A2, a3: A3);
        $m!(a1: A1, a2: A2, a3: A3, a4: A4);
        $m!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5);
        $m!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6);
        $m!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7);
        $m!(a1: A1, a2: A2, a3: A3, a4: A4, a5: A5, a6: A6, a7: A7, a8: A8);
    };
}
