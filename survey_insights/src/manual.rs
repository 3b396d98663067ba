/*!

This is the long-form manual for `survey_insights` and `surveydash`.

## The survey

The survey covers 24 cities, visited two per week over three months
(March, April and May). Each city answers the same 14 questions. Each
question has a default chart: `pie`, `bar` or `horizontalBar`.

The answers are synthetic. For a city identifier such as `mumbai-mar-w1`:

1. the seed is the sum of the character codes of the identifier;
2. for question `q`, the hash is `((seed * q * 9301 + 49297) mod 233280) / 233280`;
3. the perturbation is `floor(hash * range) - floor(range / 2)`, where the range
   depends on the question (6, 8 or 10);
4. the perturbation is added to, or removed from, the base shares of the
   question. For example the first question starts from `45/30/25`.

The same city always gets the same answers.

## Command line

```text
surveydash --tree
surveydash --search gujarat
surveydash --city mumbai-mar-w1
surveydash --city Mumbai --view insights --out mumbai.json
surveydash --all --reference dataset.json
```

- `--city` accepts a city identifier or a city name (ignoring case).
- `--search` lists the cities whose name or state contains the query.
  An empty query lists nothing.
- `--view` is `questions` (the default, every question with its chart
  data, takeaways and insights) or `insights` (one card per question with
  the most frequent answer).
- `--all` outputs the complete dataset: the hierarchy and the data of every city.
- `--out` is a file path or `stdout` (the default).
- `--reference` compares the JSON output with a file. Any difference is
  printed and the program fails.
- `--normalize` clamps negative shares and rescales every distribution to 100.
- `--verbose` turns on debug logging. Otherwise, logging follows `RUST_LOG`.

## Configuration

`surveydash` accepts a configuration file in JSON with the `--config` flag.
All the fields are optional; flags on the command line take precedence.

```json
{
  "defaultCity": "pune-mar-w1",
  "viewMode": "insights",
  "normalize": false,
  "outputPath": "pune.json"
}
```

- `defaultCity` (string): the city to output when `--city` is not given.
- `viewMode` (`questions` or `insights`): same as `--view`.
- `normalize` (boolean): same as `--normalize`.
- `outputPath` (string): same as `--out`. A relative path is resolved from the
  directory of the configuration file.

## Output format

The JSON output follows the field names of the dashboard front end:

```json
{
  "city": { "id": "mumbai-mar-w1", "name": "Mumbai", "state": "Maharashtra" },
  "month": "March",
  "week": 1,
  "questions": [
    {
      "questionId": 1,
      "questionText": "What Motivates Your Decision To Purchase Jewelry Worth ₹50,000 Or More?",
      "chartType": "pie",
      "data": {
        "labels": ["Bridal/Marriage", "Special Occasion", "Personal Use"],
        "values": [45, 30, 25]
      },
      "keyTakeaways": ["..."],
      "insights": "..."
    }
  ]
}
```

 */
